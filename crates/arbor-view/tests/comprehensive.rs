//! Comprehensive tests for arbor-view
//!
//! Factory orchestration, facet application order, and text binding.

use std::cell::Cell;
use std::rc::Rc;

use arbor_view::{ElementConfig, PropValue, Tree, bind_text, create, validate};

#[test]
fn test_validate_known_tag() {
    assert_eq!(validate("div"), Ok("div"));
    assert_eq!(validate("span"), Ok("span"));
}

#[test]
fn test_create_bare_element() {
    let mut tree = Tree::new();
    let parent = tree.create_element("main");
    tree.append_child(tree.root(), parent);

    let node = create(&mut tree, parent, ElementConfig::new("div")).unwrap();

    assert!(tree.contains(parent, node));
    let el = tree.element(node).unwrap();
    assert_eq!(el.tag(), "div");
    assert!(el.classes.is_empty());
    assert!(el.dataset.is_empty());
    assert!(el.attrs.is_empty());
}

#[test]
fn test_create_with_all_facets() {
    let mut tree = Tree::new();
    let parent = tree.create_element("main");
    tree.append_child(tree.root(), parent);

    let config = ElementConfig::new("span")
        .classes("a b")
        .index(5)
        .data_sources("x:1 y:2");
    let node = create(&mut tree, parent, config).unwrap();

    let el = tree.element(node).unwrap();
    assert!(el.classes.contains("a"));
    assert!(el.classes.contains("b"));
    assert_eq!(el.classes.len(), 2);
    assert_eq!(el.dataset.get("index"), Some("5"));
    assert_eq!(el.dataset.get("x"), Some("1"));
    assert_eq!(el.dataset.get("y"), Some("2"));
}

#[test]
fn test_create_appends_as_last_child() {
    let mut tree = Tree::new();
    let parent = tree.create_element("ul");
    tree.append_child(tree.root(), parent);

    let first = create(&mut tree, parent, ElementConfig::new("li")).unwrap();
    let second = create(&mut tree, parent, ElementConfig::new("li")).unwrap();

    let children: Vec<_> = tree.children(parent).collect();
    assert_eq!(children, vec![first, second]);
}

#[test]
fn test_create_invalid_tag_leaves_parent_untouched() {
    let mut tree = Tree::new();
    let parent = tree.create_element("main");
    tree.append_child(tree.root(), parent);
    let before = tree.child_count(parent);
    let arena_before = tree.len();

    let err = create(&mut tree, parent, ElementConfig::new("bogus")).unwrap_err();

    assert_eq!(err.tag, "bogus");
    assert_eq!(tree.child_count(parent), before);
    assert_eq!(tree.len(), arena_before); // no node created at all
}

#[test]
fn test_create_registers_listeners() {
    let mut tree = Tree::new();
    let parent = tree.create_element("main");
    tree.append_child(tree.root(), parent);

    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let config = ElementConfig::new("button").on("click", move |_| {
        counter.set(counter.get() + 1);
    });
    let button = create(&mut tree, parent, config).unwrap();

    tree.dispatch(button, "click");
    assert_eq!(clicks.get(), 1);
}

#[test]
fn test_properties_overwrite_attributes() {
    // Facet order: attributes before properties, so a reflected
    // property wins over the attribute with the same effect.
    let mut tree = Tree::new();
    let parent = tree.create_element("main");
    tree.append_child(tree.root(), parent);

    let config = ElementConfig::new("div")
        .attr("id", "from-attr")
        .prop("id", "from-prop");
    let node = create(&mut tree, parent, config).unwrap();

    assert_eq!(tree.attribute(node, "id"), Some("from-prop"));
    assert_eq!(tree.get_element_by_id("from-prop"), Some(node));
    assert_eq!(tree.get_element_by_id("from-attr"), None);
}

#[test]
fn test_text_property_sets_content() {
    let mut tree = Tree::new();
    let parent = tree.create_element("main");
    tree.append_child(tree.root(), parent);

    let config = ElementConfig::new("p").prop("text", "hello");
    let node = create(&mut tree, parent, config).unwrap();

    assert_eq!(tree.text_content(node), "hello");
}

#[test]
fn test_custom_property_stored() {
    let mut tree = Tree::new();
    let parent = tree.create_element("main");
    tree.append_child(tree.root(), parent);

    let config = ElementConfig::new("div").prop("draggable", true);
    let node = create(&mut tree, parent, config).unwrap();

    assert_eq!(tree.property(node, "draggable"), Some(&PropValue::Bool(true)));
}

#[test]
fn test_bind_then_write() {
    let mut tree = Tree::new();
    let parent = tree.create_element("main");
    tree.append_child(tree.root(), parent);
    let node = create(&mut tree, parent, ElementConfig::new("div")).unwrap();

    let mut binding = bind_text(&mut tree, node, "text", "Hello");
    assert_eq!(tree.text_content(node), "Hello");

    binding.set(&mut tree, "text", "World");
    assert_eq!(tree.text_content(node), "World");
    assert_eq!(binding.value(), &PropValue::from("World"));
}

#[test]
fn test_binding_tracks_factory_output() {
    let mut tree = Tree::new();
    let parent = tree.create_element("main");
    tree.append_child(tree.root(), parent);

    let counter = create(
        &mut tree,
        parent,
        ElementConfig::new("span").classes("counter"),
    )
    .unwrap();
    let mut binding = bind_text(&mut tree, counter, "count", 0);

    binding.set(&mut tree, "count", 1);
    binding.set(&mut tree, "count", 2);

    let found = tree.query_selector(".counter").unwrap();
    assert_eq!(found, counter);
    assert_eq!(tree.text_content(found), "2");
}
