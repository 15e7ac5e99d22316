//! End-to-end indexing over small documentation trees laid out like the
//! output of different javadoc versions.

use javadoc_index::config::{OutputConfig, Settings};
use javadoc_index::output::render_to_string;
use javadoc_index::resolver::resolve_entries;
use javadoc_index::{IndexError, build_index};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// JDK 8 style: split index, `memberNameLink` spans, `<code>` labels.
const JDK8_INDEX_PAGE: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN">
<html><body>
<dl>
<dt><span class="memberNameLink"><a href="../java/util/List.html#add-E-">add(E)</a></span> - Method in interface java.util.<a href="../java/util/List.html" title="interface in java.util">List</a></dt>
<dt><span class="memberNameLink"><a href="../java/util/Map.html#entrySet--">entrySet()</a></span> - Method in interface java.util.<a href="../java/util/Map.html" title="interface in java.util">Map</a></dt>
<dt><a href="../java/util/Map.Entry.html" title="interface in java.util"><span class="typeNameLink">Map.Entry</span></a>&lt;<a href="../java/util/Map.Entry.html" title="type parameter in Map.Entry">K</a>,<a href="../java/util/Map.Entry.html" title="type parameter in Map.Entry">V</a>&gt; - Interface in java.util</dt>
<dt><a href="../java/lang/Deprecated.html" title="annotation in java.lang">Deprecated</a> - Annotation Type in java.lang</dt>
</dl>
</body></html>"#;

/// JDK 17 style: modular tree, single index-all page, `member-name-link` anchors.
const JDK17_INDEX_PAGE: &str = r#"<!DOCTYPE HTML>
<html lang="en"><body><main role="main">
<dl class="index">
<dt><a href="java.base/java/lang/Object.html#equals(java.lang.Object)" class="member-name-link">equals(Object)</a> - Method in class java.lang.<a href="java.base/java/lang/Object.html" title="class in java.lang">Object</a></dt>
<dt><a href="jdk.compiler/com/sun/source/tree/Tree.Kind.html" class="type-name-link" title="enum class in com.sun.source.tree">Tree.Kind</a> - Enum Class in com.sun.source.tree</dt>
<dt><a href="java.base/java/util/List.html#of()" class="member-name-link">of()</a> - Static method in interface java.util.<a href="java.base/java/util/List.html" title="interface in java.util">List</a></dt>
<dt><a href="https://openjdk.org/projects/jdk/17/" title="class in external">External</a></dt>
</dl>
</main></body></html>"#;

fn write(path: &Path, content: &str) -> PathBuf {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
    path.to_path_buf()
}

fn refs(report: &javadoc_index::IndexReport, symbol: &str) -> Vec<String> {
    report
        .symbols
        .references(symbol)
        .map(|set| set.iter().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn test_jdk8_split_index() {
    let temp_dir = TempDir::new().unwrap();
    let api = temp_dir.path().join("jdk8").join("api");
    let page = write(&api.join("index-files").join("index-1.html"), JDK8_INDEX_PAGE);

    let report = build_index(&[page], &Settings::default()).unwrap();

    assert_eq!(
        refs(&report, "add(E)"),
        vec![format!("file:{}/java/util/List.html#add-E-", api.display())]
    );
    assert_eq!(
        refs(&report, "entrySet()"),
        vec![format!("file:{}/java/util/Map.html#entrySet--", api.display())]
    );
    assert_eq!(
        refs(&report, "Map.Entry"),
        vec![format!("file:{}/java/util/Map.Entry.html", api.display())]
    );
    assert_eq!(refs(&report, "Deprecated").len(), 1);
    // Type parameters are not symbols
    assert!(report.symbols.references("K").is_none());
    assert!(report.symbols.references("V").is_none());
    assert_eq!(report.ignored_prefixes, vec![format!("file:{}", api.display())]);
}

#[test]
fn test_jdk17_modular_tree() {
    let temp_dir = TempDir::new().unwrap();
    let api = temp_dir.path().join("jdk17").join("api");
    let page = write(&api.join("index-all.html"), JDK17_INDEX_PAGE);
    fs::create_dir_all(api.join("java.base")).unwrap();
    fs::create_dir_all(api.join("jdk.compiler")).unwrap();
    fs::create_dir_all(api.join("legal")).unwrap();

    let report = build_index(&[page], &Settings::default()).unwrap();

    assert_eq!(
        report.ignored_prefixes,
        vec![
            format!("file:{}", api.join("java.base").display()),
            format!("file:{}", api.join("jdk.compiler").display()),
        ]
    );
    assert_eq!(
        refs(&report, "equals(Object)"),
        vec![format!(
            "file:{}/java.base/java/lang/Object.html#equals-java.lang.Object-",
            api.display()
        )]
    );
    assert_eq!(refs(&report, "Tree.Kind").len(), 1);
    assert_eq!(
        refs(&report, "of()"),
        vec![format!("file:{}/java.base/java/util/List.html#of--", api.display())]
    );
    assert!(report.symbols.references("External").is_none());
}

#[test]
fn test_same_symbol_from_two_trees() {
    let temp_dir = TempDir::new().unwrap();
    let jdk8 = temp_dir.path().join("jdk8").join("api");
    let jdk17 = temp_dir.path().join("jdk17").join("api");
    let old = write(&jdk8.join("index-files").join("index-1.html"), JDK8_INDEX_PAGE);
    let new = write(&jdk17.join("index-all.html"), JDK17_INDEX_PAGE);
    fs::create_dir_all(jdk17.join("java.base")).unwrap();

    let report = build_index(&[old, new], &Settings::default()).unwrap();

    // "List" is linked from both trees
    assert_eq!(
        refs(&report, "List"),
        vec![
            format!("file:{}/java.base/java/util/List.html", jdk17.display()),
            format!("file:{}/java/util/List.html", jdk8.display()),
        ]
    );
    assert_eq!(report.ignored_prefixes.len(), 2);
}

#[test]
fn test_resolve_then_index_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    let index_files = temp_dir.path().join("api").join("index-files");
    write(&index_files.join("index-2.html"), JDK8_INDEX_PAGE);
    write(&index_files.join("index-1.html"), JDK8_INDEX_PAGE);

    let entries = vec![format!("{}/index-*.html", index_files.display())];
    let render = || {
        let files = resolve_entries(&entries).unwrap().files;
        let report = build_index(&files, &Settings::default()).unwrap();
        render_to_string(&report, &OutputConfig::default()).unwrap()
    };

    let first = render();
    assert_eq!(first, render());
    // Inputs are processed in sorted order
    let arguments = first.lines().nth(2).unwrap();
    assert!(arguments.starts_with(";; arguments: "));
    assert!(arguments.find("index-1.html").unwrap() < arguments.find("index-2.html").unwrap());
}

#[test]
fn test_vendor_layout() {
    let temp_dir = TempDir::new().unwrap();
    let apidocs = temp_dir.path().join("jgit").join("apidocs");
    let page = write(
        &apidocs.join("index-all.html"),
        r#"<a href="org.eclipse.jgit/org/eclipse/jgit/api/Git.html" title="class in org.eclipse.jgit.api">Git</a>"#,
    );
    fs::create_dir_all(apidocs.join("org.eclipse.jgit")).unwrap();

    let report = build_index(&[page], &Settings::default()).unwrap();
    assert_eq!(
        report.ignored_prefixes,
        vec![format!("file:{}", apidocs.join("org.eclipse.jgit").display())]
    );
}

#[test]
fn test_missing_anchor_reports_file() {
    let temp_dir = TempDir::new().unwrap();
    let page = write(
        &temp_dir.path().join("api").join("index-all.html"),
        r#"<dl><dt><span class="memberNameLink">broken</span></dt></dl>"#,
    );

    match build_index(&[page.clone()], &Settings::default()) {
        Err(IndexError::MissingAnchor { file, .. }) => assert_eq!(file, page),
        other => panic!("expected MissingAnchor, got {other:?}"),
    }
}
