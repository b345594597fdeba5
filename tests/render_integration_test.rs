//! Render Integration Tests
//!
//! Draws the dashboard into a test backend and drives it through the real
//! mouse path: hit areas registered by the draw pass, hit-tested clicks,
//! hover resolution, and the tooltip overlay.

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use lexis::prelude::*;
use lexis::ui;
use lexis::ui::layout::chart_areas;

const HEADER: &str =
    "country,leader,gender,start_year,end_year,start_age,end_age,duration,pcgdp,label,oecd,eu,brics,gseven,gtwenty";

fn test_app() -> App {
    let text = format!(
        "{HEADER}\n\
         Germany,Angela Merkel,F,2005,2021,51,67,16,41086.7,1,1,1,0,1,1\n\
         UK,Tony Blair,M,1997,2007,43,53,10,33503.6,0,1,1,0,1,1\n\
         France,Emmanuel Macron,M,2017,2022,39,44,5,38855.1,0,1,1,0,1,1\n\
         India,Indira Gandhi,F,1966,1977,48,59,11,1128.1,1,0,0,1,0,1"
    );
    App::new(parse_dataset(&text).unwrap(), DashboardConfig::default())
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal
        .draw(|frame| ui::render(frame, app))
        .expect("draw failed");
    app.needs_redraw = false;
}

/// Scan a rect for the first cell whose topmost hit area matches.
fn find_cell<F>(app: &App, rect: ratatui::layout::Rect, matches: F) -> Option<(u16, u16)>
where
    F: Fn(ClickAction) -> bool,
{
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if app.hit_registry.hit_test(x, y).is_some_and(&matches) {
                return Some((x, y));
            }
        }
    }
    None
}

#[test]
fn a_draw_pass_registers_hit_areas_for_every_surface() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    let frame = ratatui::layout::Rect::new(0, 0, 120, 40);
    let areas = chart_areas(frame, &app.config);

    assert!(find_cell(&app, areas.tabs, |a| matches!(a, ClickAction::SelectRegion(_))).is_some());
    assert!(find_cell(&app, areas.bar, |a| matches!(a, ClickAction::ToggleGender(_))).is_some());
    assert!(find_cell(&app, areas.lexis, |a| matches!(a, ClickAction::ToggleLeader(_))).is_some());
    assert!(find_cell(&app, areas.scatter, |a| matches!(a, ClickAction::ToggleLeader(_))).is_some());
    assert!(find_cell(&app, areas.scatter, |a| a == ClickAction::ClearSelection).is_some());
}

#[test]
fn clicking_a_region_tab_switches_the_region() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    let frame = ratatui::layout::Rect::new(0, 0, 120, 40);
    let areas = chart_areas(frame, &app.config);
    let (x, y) = find_cell(&app, areas.tabs, |a| {
        a == ClickAction::SelectRegion(Region::Brics)
    })
    .expect("BRICS tab not registered");

    app.on_mouse_down(x, y);
    assert_eq!(app.state().region(), Region::Brics);
    assert!(app.needs_redraw);
}

#[test]
fn clicking_a_scatter_point_selects_and_background_clears() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    let frame = ratatui::layout::Rect::new(0, 0, 120, 40);
    let areas = chart_areas(frame, &app.config);

    let (px, py) = find_cell(&app, areas.scatter, |a| {
        matches!(a, ClickAction::ToggleLeader(_))
    })
    .expect("no scatter point registered");
    app.on_mouse_down(px, py);
    assert_eq!(app.state().active().len(), 1);

    // redraw, then click a background cell of the scatter
    draw(&mut terminal, &mut app);
    let (bx, by) = find_cell(&app, areas.scatter, |a| a == ClickAction::ClearSelection)
        .expect("no scatter background registered");
    app.on_mouse_down(bx, by);
    assert!(app.state().active().is_empty());
}

#[test]
fn clicking_a_gender_bar_toggles_the_filter_through_the_registry() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    let frame = ratatui::layout::Rect::new(0, 0, 120, 40);
    let areas = chart_areas(frame, &app.config);
    let (x, y) = find_cell(&app, areas.bar, |a| matches!(a, ClickAction::ToggleGender(_)))
        .expect("no gender bar registered");

    app.on_mouse_down(x, y);
    assert!(app.state().gender_filter().is_some());
    app.on_mouse_down(x, y);
    assert_eq!(app.state().gender_filter(), None);
}

#[test]
fn hovering_a_point_floats_the_tooltip() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    let frame = ratatui::layout::Rect::new(0, 0, 120, 40);
    let areas = chart_areas(frame, &app.config);
    let (x, y) = find_cell(&app, areas.scatter, |a| {
        matches!(a, ClickAction::ToggleLeader(_))
    })
    .expect("no scatter point registered");

    assert!(app.on_mouse_moved(x, y));
    let target = app.hovered.expect("hover target not resolved");
    let name = app.dataset.get(target.leader).unwrap().leader.clone();

    draw(&mut terminal, &mut app);
    let screen = format!("{:?}", terminal.backend().buffer());
    assert!(
        screen.contains(&name),
        "tooltip for {name} not found on screen"
    );
}

#[test]
fn hover_survives_an_unrelated_redraw() {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut app = test_app();
    draw(&mut terminal, &mut app);

    let frame = ratatui::layout::Rect::new(0, 0, 120, 40);
    let areas = chart_areas(frame, &app.config);
    let (x, y) = find_cell(&app, areas.scatter, |a| {
        matches!(a, ClickAction::ToggleLeader(_))
    })
    .expect("no scatter point registered");

    app.on_mouse_moved(x, y);
    draw(&mut terminal, &mut app);
    // the render pass re-resolved the hover against the fresh areas
    assert!(app.hovered.is_some());
}
