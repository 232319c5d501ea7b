//! Navigation
//!
//! The board and the per-day detail page share one document; the `day`
//! query parameter picks between them.

use planner_core::Day;

pub const DAY_PARAM: &str = "day";

/// Which page to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Board,
    Daily(Day),
}

impl Page {
    /// Resolve the page from the raw `day` parameter. An unrecognised day
    /// falls back to `default_day`.
    pub fn from_day_param(param: Option<&str>, default_day: Day) -> Self {
        match param {
            None => Page::Board,
            Some(raw) => Page::Daily(Day::from_str(raw.trim()).unwrap_or(default_day)),
        }
    }
}

/// Read the current page from the document URL
pub fn current_page(default_day: Day) -> Page {
    let param = web_sys::window()
        .and_then(|win| win.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(DAY_PARAM));
    Page::from_day_param(param.as_deref(), default_day)
}

/// The local weekday
pub fn today() -> Day {
    Day::from_weekday(js_sys::Date::new_0().get_day())
}

pub fn day_query(day: Day) -> String {
    format!("?{}={}", DAY_PARAM, day.as_str())
}

/// Navigate to the detail page for `day`
pub fn open_day_details(day: Day) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_search(&day_query(day)) {
            web_sys::console::error_1(&format!("[NAV] Failed to open {}: {:?}", day.as_str(), e).into());
        }
    }
}

/// Link back to the weekly board (same path, no query)
pub fn board_href() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_param_is_board() {
        assert_eq!(Page::from_day_param(None, Day::Monday), Page::Board);
    }

    #[test]
    fn test_known_day() {
        assert_eq!(Page::from_day_param(Some("friday"), Day::Monday), Page::Daily(Day::Friday));
    }

    #[test]
    fn test_unknown_day_falls_back() {
        assert_eq!(Page::from_day_param(Some("someday"), Day::Monday), Page::Daily(Day::Monday));
        assert_eq!(Page::from_day_param(Some(""), Day::Tuesday), Page::Daily(Day::Tuesday));
    }

    #[test]
    fn test_day_query() {
        assert_eq!(day_query(Day::Sunday), "?day=sunday");
    }
}
