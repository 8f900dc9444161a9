use simplelog::{Config, LevelFilter, SimpleLogger};
use viewquery::element::Button;
use viewquery::{
    Element, FocusState, ROOTS, TypeFilter, ViewQuery, control_query, tab_order, widget_type,
};

static BUTTONS: TypeFilter<Button> = widget_type::<Button>();

fn main() {
    // VIEWQUERY_LOG=trace shows every query run
    let level = std::env::var("VIEWQUERY_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    SimpleLogger::init(level, Config::default()).expect("Failed to initialize logger");

    let root = ui();

    let controls = control_query().run(&root);
    log::info!("controls: {:?}", names(&controls));

    let buttons = ViewQuery::new().post_filter(&BUTTONS).run(&root);
    log::info!("buttons: {:?}", names(&buttons));

    let roots = ViewQuery::new().post_filter(&ROOTS).run(&root);
    log::info!("interaction scopes: {:?}", names(&roots));

    log::info!("tab order: {:?}", names(&tab_order(&root)));

    let mut focus = FocusState::new();
    for _ in 0..3 {
        if let Some(id) = focus.focus_next(&root) {
            log::info!("Tab -> {id}");
        }
    }
    if let Some(id) = focus.focus_prev(&root) {
        log::info!("Shift+Tab -> {id}");
    }
}

fn names<'a>(views: &[&'a Element]) -> Vec<&'a str> {
    views.iter().map(|el| el.id.as_str()).collect()
}

fn ui() -> Element {
    Element::box_()
        .id("window")
        .child(header())
        .child(form())
        .child(confirm_dialog())
}

fn header() -> Element {
    Element::box_()
        .id("header")
        .child(Element::text("Settings").id("title"))
        .child(Element::button("Close").id("close").tab_group(1))
}

fn form() -> Element {
    Element::box_()
        .id("form")
        .child(
            Element::text_input("")
                .id("name")
                .placeholder("Display name"),
        )
        .child(Element::checkbox("Notifications", true).id("notify"))
        .child(
            Element::box_()
                .id("advanced")
                .visible(false)
                .child(Element::button("Reset").id("reset")),
        )
        .child(Element::button("Save").id("save"))
}

fn confirm_dialog() -> Element {
    Element::scope()
        .id("confirm")
        .visible(false)
        .child(Element::button("Discard").id("discard"))
        .child(Element::button("Keep").id("keep"))
}
