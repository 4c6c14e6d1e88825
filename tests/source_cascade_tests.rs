//! Walking several sources for one item and recording the outcome.

use specsieve::{
    scan_plain_text, to_map, ProductRecord, SpecExtractor, SpecOptions, StaticPage, NOT_FOUND_LINE,
};

const EMPTY_PAGE: &str = "<html><body><p>Out of stock</p></body></html>";

const SPEC_PAGE: &str = r#"
    <html><body>
        <div class="tabs"><div role="tab">Описание</div><div role="tab">Характеристики</div></div>
        <div class="product-params">
            <div class="param-item"><span class="param-name">Мощность</span><span class="param-value">800 Вт</span></div>
            <div class="param-item"><span class="param-name">Вес</span><span class="param-value">2,1 кг</span></div>
            <div class="param-item"><span class="param-name">Цвет</span><span class="param-value">зелёный</span></div>
        </div>
    </body></html>"#;

#[test]
fn first_source_with_lines_wins() {
    let extractor = SpecExtractor::new(SpecOptions::default()).unwrap();
    let pages = vec![
        StaticPage::new(EMPTY_PAGE),
        StaticPage::new(SPEC_PAGE),
        StaticPage::new(SPEC_PAGE),
    ];

    let hit = extractor.first_with_specs(pages).expect("second page has specs");
    assert_eq!(hit.index, 1);
    let lines: Vec<_> = hit.lines.iter().map(|l| l.as_str()).collect();
    assert_eq!(lines, vec!["Мощность: 800 Вт", "Вес: 2,1 кг", "Цвет: зелёный"]);
}

#[test]
fn no_source_yields_not_found_record() {
    let extractor = SpecExtractor::new(SpecOptions::default()).unwrap();
    let pages = vec![StaticPage::new(EMPTY_PAGE), StaticPage::new(EMPTY_PAGE)];

    let lines = extractor
        .first_with_specs(pages)
        .map(|hit| hit.lines)
        .unwrap_or_default();
    let record = ProductRecord::new(0, "Acme", "T-1", "Trimmer", &lines);

    assert!(!record.found());
    assert_eq!(record.specs.keys().collect::<Vec<_>>(), vec![NOT_FOUND_LINE]);
}

#[test]
fn record_json_carries_item_metadata() {
    let extractor = SpecExtractor::new(SpecOptions::default()).unwrap();
    let hit = extractor
        .first_with_specs(vec![StaticPage::new(SPEC_PAGE)])
        .unwrap();
    let record = ProductRecord::new(4, "Greenworks", "G40", "Триммер", &hit.lines);

    let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
    assert_eq!(json["position"], 4);
    assert_eq!(json["name"], "Greenworks G40");
    assert_eq!(json["description"], "Триммер");
    assert_eq!(json["specs"]["Мощность"], " 800 Вт");
}

#[test]
fn plain_text_block_maps_to_single_entry() {
    let text = "Руководство\n\nТехнические характеристики: напряжение 18 В\nМасса 2 кг\n\nУтилизация";
    let block = scan_plain_text(text).unwrap();
    assert_eq!(block, "характеристики: напряжение 18 В\nМасса 2 кг");

    let map = to_map([block]);
    assert_eq!(map.get("характеристики"), Some(" напряжение 18 В\nМасса 2 кг"));
}
