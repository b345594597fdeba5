//! Click action dispatch.
//!
//! Translates hit-area actions into coordinator operations on the `App`.
//! Called from the event loop when a mouse click lands on a registered
//! hit area.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click that landed on a registered hit area.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    // Any routed click likely changes state
    app.mark_dirty();

    match action {
        ClickAction::SelectRegion(region) => {
            tracing::debug!(region = region.label(), "click: region tab");
            app.select_region(region);
        }
        ClickAction::ToggleGender(gender) => {
            tracing::debug!(%gender, "click: gender bar");
            app.toggle_gender(gender);
        }
        ClickAction::ToggleLeader(id) => {
            tracing::debug!(id = id.0, "click: leader");
            app.toggle_leader(id);
        }
        ClickAction::ClearSelection => {
            tracing::debug!("click: chart background, clearing selection");
            app.clear_selection();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::data::loader::parse_dataset;
    use crate::data::model::{Gender, LeaderId, Region};

    fn test_app() -> App {
        let dataset = parse_dataset(
            "country,leader,gender,start_year,end_year,start_age,end_age,duration,pcgdp,label,oecd,eu,brics,gseven,gtwenty\n\
             Germany,Angela Merkel,F,2005,2021,51,67,16,34696,1,1,1,0,1,1\n\
             UK,Tony Blair,M,1997,2007,43,53,10,26000,0,1,1,0,1,1",
        )
        .unwrap();
        App::new(dataset, DashboardConfig::default())
    }

    #[test]
    fn click_marks_the_app_dirty() {
        let mut app = test_app();
        app.needs_redraw = false;
        handle_click_action(&mut app, ClickAction::ClearSelection);
        assert!(app.needs_redraw);
    }

    #[test]
    fn region_tab_click_switches_the_region() {
        let mut app = test_app();
        handle_click_action(&mut app, ClickAction::SelectRegion(Region::Eu));
        assert_eq!(app.coordinator.state().region(), Region::Eu);
    }

    #[test]
    fn gender_bar_click_toggles_the_filter() {
        let mut app = test_app();
        handle_click_action(&mut app, ClickAction::ToggleGender(Gender::Female));
        assert_eq!(app.coordinator.state().gender_filter(), Some(Gender::Female));
        handle_click_action(&mut app, ClickAction::ToggleGender(Gender::Female));
        assert_eq!(app.coordinator.state().gender_filter(), None);
    }

    #[test]
    fn leader_click_toggles_selection() {
        let mut app = test_app();
        let id = app.coordinator.state().base()[0];
        handle_click_action(&mut app, ClickAction::ToggleLeader(id));
        assert!(app.coordinator.state().is_selected(id));
        handle_click_action(&mut app, ClickAction::ToggleLeader(id));
        assert!(!app.coordinator.state().is_selected(id));
    }

    #[test]
    fn off_gender_leader_click_is_inert() {
        let mut app = test_app();
        // base order: Blair (label 0) then Merkel (label 1)
        let blair = app.coordinator.state().base()[0];
        handle_click_action(&mut app, ClickAction::ToggleGender(Gender::Female));
        handle_click_action(&mut app, ClickAction::ToggleLeader(blair));
        assert!(
            !app.coordinator.state().is_selected(blair),
            "a male leader must stay inert under a female filter"
        );
        // and the swallowed click must not have cleared anything either
        let merkel = LeaderId(1);
        handle_click_action(&mut app, ClickAction::ToggleLeader(merkel));
        assert!(app.coordinator.state().is_selected(merkel));
    }
}
