use super::*;

use slidepanel_ui_graphics::Size;

const VIEWPORT: Size = Size {
    width: 800.0,
    height: 600.0,
};
const PANEL: Size = Size {
    width: 300.0,
    height: 600.0,
};

#[test]
fn start_panel_slides_in_from_left_edge() {
    let hidden = place_with_width_factor(
        Alignment::CENTER_START,
        Alignment::CENTER_END,
        VIEWPORT,
        PANEL,
        0.0,
    );
    assert_eq!(hidden.x, -300.0);

    let half = place_with_width_factor(
        Alignment::CENTER_START,
        Alignment::CENTER_END,
        VIEWPORT,
        PANEL,
        0.5,
    );
    assert_eq!(half.x, -150.0);

    let shown = place_with_width_factor(
        Alignment::CENTER_START,
        Alignment::CENTER_END,
        VIEWPORT,
        PANEL,
        1.0,
    );
    assert_eq!(shown.x, 0.0);
    assert_eq!(shown.size(), PANEL);
}

#[test]
fn end_panel_slides_in_from_right_edge() {
    let hidden = place_with_width_factor(
        Alignment::CENTER_END,
        Alignment::CENTER_START,
        VIEWPORT,
        PANEL,
        0.0,
    );
    assert_eq!(hidden.x, 800.0);

    let shown = place_with_width_factor(
        Alignment::CENTER_END,
        Alignment::CENTER_START,
        VIEWPORT,
        PANEL,
        1.0,
    );
    assert_eq!(shown.x, 500.0);
    assert_eq!(shown.right(), 800.0);
}

#[test]
fn width_factor_is_clamped() {
    let overdrawn = place_with_width_factor(
        Alignment::CENTER_START,
        Alignment::CENTER_END,
        VIEWPORT,
        PANEL,
        3.0,
    );
    assert_eq!(overdrawn.x, 0.0);
}

#[test]
fn flipped_swaps_edges() {
    assert_eq!(HorizontalAlignment::Start.flipped(), HorizontalAlignment::End);
    assert_eq!(HorizontalAlignment::End.flipped(), HorizontalAlignment::Start);
    assert_eq!(
        HorizontalAlignment::CenterHorizontally.flipped(),
        HorizontalAlignment::CenterHorizontally
    );
}
