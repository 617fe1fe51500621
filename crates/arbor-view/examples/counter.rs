//! Counter demo
//!
//! Builds a small element tree, binds a counter to a text node, and
//! dispatches a few clicks.

use std::cell::Cell;
use std::rc::Rc;

use arbor_view::{ElementConfig, InvalidTagError, Tree, bind_text, create};

fn main() -> Result<(), InvalidTagError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut tree = Tree::new();
    let root = tree.root();
    let app = create(&mut tree, root, ElementConfig::new("main").attr("id", "app"))?;

    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let button = create(
        &mut tree,
        app,
        ElementConfig::new("button")
            .classes("btn btn-primary")
            .prop("text", "+1")
            .on("click", move |_| counter.set(counter.get() + 1)),
    )?;

    let display = create(
        &mut tree,
        app,
        ElementConfig::new("span").classes("counter").index(0),
    )?;
    let mut count = bind_text(&mut tree, display, "count", 0);

    for _ in 0..3 {
        tree.dispatch(button, "click");
        count.set(&mut tree, "count", i64::from(clicks.get()));
    }

    println!(
        "clicks={} display={}",
        clicks.get(),
        tree.text_content(display)
    );
    Ok(())
}
