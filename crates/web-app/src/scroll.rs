use log::warn;

use enisey_domain::Section;

/// Smoothly scrolls the element with the anchor id of the section into view.
pub fn scroll_to_section(section: Section) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()))
    else {
        warn!("failed to find section \"{}\"", section.anchor());
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
