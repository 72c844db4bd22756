//! End-to-end wiring: data source -> engine -> renderer, with debounced input.


use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use fixtures::PRODUCTS_JSON;
use product_view::{
    select_page_size, JsonFileSource, JsonStrSource, LogRenderer, PageControl, ProductRow,
    ResultsSummary, SearchDebouncer, SortControl, ViewConfig, ViewEngine,
};
#[cfg(feature = "emitter")]
use product_view::{EventEmitter, LocalEmitterRenderer, RenderFrame};

#[test]
fn loads_json_and_renders_rows() {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let mut engine = ViewEngine::new(LogRenderer::with_buffer(buffer.clone()));

    engine.initialize_from(&JsonStrSource::new(PRODUCTS_JSON));
    assert_eq!(engine.records().len(), 4);

    "price-desc".parse::<SortControl>().unwrap().apply(&mut engine);
    let frame = engine.frame();
    let rows: Vec<ProductRow> = frame.rows(engine.config().description_max_chars);

    assert_eq!(rows[0].title, "Classic Leather Jacket");
    assert_eq!(rows[0].price, "$120");
    assert_eq!(rows[0].image.as_deref(), Some("https://i.imgur.com/jacket.jpeg"));
    // image entry is not a URL, so the category image is used
    assert_eq!(rows[1].image.as_deref(), Some("https://i.imgur.com/shoes.jpeg"));
    assert_eq!(rows[3].category, "N/A");
    assert!(rows[2].description.ends_with("..."));

    let lines = buffer.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "[VIEW] Showing 1 - 4 of 4 products | Page 1/1 | ids=[12,40,7,3]"
    );
}

#[test]
fn load_failure_degrades_to_empty_view() {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let mut engine = ViewEngine::new(LogRenderer::with_buffer(buffer.clone()));

    engine.initialize_from(&JsonFileSource::new("/nonexistent/products.json"));
    assert!(engine.records().is_empty());
    assert_eq!(engine.results_summary(), ResultsSummary::Empty);

    engine.search("jacket");
    assert!(!PageControl::Next.apply(&mut engine));

    let lines = buffer.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.contains("No products found")));
}

#[cfg(feature = "emitter")]
#[test]
fn emitter_delivers_json_frames() {
    let frames = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&frames);

    let mut renderer = LocalEmitterRenderer::new(EventEmitter::new());
    renderer.on_render(move |json| {
        sink.lock().unwrap().push(json);
    });

    let mut engine = ViewEngine::new(renderer);
    engine.initialize_from(&JsonStrSource::new(PRODUCTS_JSON));
    engine.search("shoe");

    // EventEmitter delivers on its own threads, give it time
    thread::sleep(Duration::from_millis(100));

    let frames = frames.lock().unwrap();
    assert_eq!(frames.len(), 2);
    let decoded: Vec<RenderFrame> = frames
        .iter()
        .map(|f| serde_json::from_str(f).unwrap())
        .collect();
    assert!(decoded
        .iter()
        .any(|f| f.search_term == "shoe" && f.items.len() == 1 && f.items[0].id == 40));
}

#[test]
fn debounced_typing_with_controls() {
    let config = ViewConfig {
        page_sizes: vec![1, 2, 4],
        search_debounce_ms: 40,
        ..ViewConfig::default()
    };
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let mut engine =
        ViewEngine::with_config(config.clone(), LogRenderer::with_buffer(buffer.clone()));
    engine.initialize_from(&JsonStrSource::new(PRODUCTS_JSON));
    select_page_size(&mut engine, 1).unwrap();
    SortControl::NameAscending.apply(&mut engine);
    assert!(PageControl::Number(3).apply(&mut engine));

    let engine = engine.into_shared();
    let debouncer = SearchDebouncer::from_config(engine.clone(), &config);
    for term in ["c", "cl", "cla", "clas", "class"] {
        debouncer.input(term);
    }
    thread::sleep(Duration::from_millis(300));
    let stats = debouncer.stop();

    assert_eq!(stats.inputs, 5);
    assert_eq!(stats.searches, 1);

    let engine = engine.lock().unwrap();
    assert_eq!(engine.query().page, 1);
    assert_eq!(SortControl::active(&*engine), Some(SortControl::NameAscending));
    let titles: Vec<_> = engine.matched().iter().map(|r| r.title.clone()).collect();
    assert_eq!(titles, vec!["Classic Leather Jacket", "Classic Wool Scarf"]);
    assert_eq!(engine.total_pages(), 2);

    // initialize, page size, sort, page 3, one debounced search
    assert_eq!(buffer.lock().unwrap().len(), 5);
}
