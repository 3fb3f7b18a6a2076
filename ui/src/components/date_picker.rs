//! Hand-rolled calendar widget replacing the browser date input. The field
//! shows the selected `YYYY-MM-DD` value; clicking it opens a month grid
//! with previous/next navigation.

use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendar, FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Number of days in a month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Weekday of the first of the month, 0 = Sunday.
fn first_weekday(year: i32, month: u32) -> usize {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0)
}

/// Move to the first of the month `delta` months away.
fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let (year, month0) = (months.div_euclid(12), months.rem_euclid(12));
    NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1).unwrap_or(date)
}

/// Date field with a drop-down month grid. `value` is `YYYY-MM-DD` or empty;
/// `on_change` receives the same format.
#[component]
pub fn DatePicker(label: String, value: String, on_change: EventHandler<String>) -> Element {
    let mut open = use_signal(|| false);
    let today = chrono::Local::now().date_naive();
    let selected: Option<NaiveDate> = value.parse().ok();
    let mut view = use_signal(move || selected.unwrap_or(today));

    let toggle = move |_| {
        if !open() {
            // Re-open on the month of the current selection
            if let Some(date) = selected {
                view.set(date);
            }
        }
        open.set(!open());
    };

    let viewed = view();
    let month_name = MONTHS[viewed.month0() as usize];
    let year = viewed.year();
    let blanks = first_weekday(viewed.year(), viewed.month());
    let days = days_in_month(viewed.year(), viewed.month());

    let select_day = move |day: u32| {
        let viewed = view();
        if let Some(date) = NaiveDate::from_ymd_opt(viewed.year(), viewed.month(), day) {
            on_change.call(date.to_string());
        }
        open.set(false);
    };

    rsx! {
        div {
            class: "date-picker",
            label { class: "field-label", "{label}" }

            div {
                class: "date-input",
                onclick: toggle,
                span { class: "date-input-icon", Icon { icon: FaCalendar, width: 16, height: 16 } }
                if value.is_empty() {
                    span { class: "date-placeholder", "Select a date" }
                } else {
                    span { class: "date-value", "{value}" }
                }
            }

            if open() {
                div {
                    class: "calendar",
                    div {
                        class: "calendar-header",
                        button {
                            r#type: "button",
                            class: "calendar-nav",
                            onclick: move |_| view.set(shift_month(view(), -1)),
                            Icon { icon: FaChevronLeft, width: 14, height: 14 }
                        }
                        span { class: "calendar-month", "{month_name} {year}" }
                        button {
                            r#type: "button",
                            class: "calendar-nav",
                            onclick: move |_| view.set(shift_month(view(), 1)),
                            Icon { icon: FaChevronRight, width: 14, height: 14 }
                        }
                    }

                    div {
                        class: "calendar-grid",
                        for day in WEEKDAYS {
                            span { key: "{day}", class: "calendar-weekday", "{day}" }
                        }
                        for blank in 0..blanks {
                            span { key: "blank-{blank}", class: "calendar-blank" }
                        }
                        for day in 1..=days {
                            DayCell {
                                key: "{day}",
                                day,
                                selected: selected == NaiveDate::from_ymd_opt(viewed.year(), viewed.month(), day),
                                today: Some(today) == NaiveDate::from_ymd_opt(viewed.year(), viewed.month(), day),
                                on_select: select_day,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DayCell(day: u32, selected: bool, today: bool, on_select: EventHandler<u32>) -> Element {
    let class = if selected {
        "calendar-day selected"
    } else if today {
        "calendar-day today"
    } else {
        "calendar-day"
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            onclick: move |evt| {
                evt.prevent_default();
                on_select.call(day);
            },
            "{day}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29); // leap year
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_first_weekday() {
        // 2025-01-01 is a Wednesday
        assert_eq!(first_weekday(2025, 1), 3);
        // 2024-09-01 is a Sunday
        assert_eq!(first_weekday(2024, 9), 0);
    }

    #[test]
    fn test_shift_month_rolls_over_years() {
        let june: NaiveDate = "2025-06-15".parse().unwrap();
        assert_eq!(shift_month(june, 1).to_string(), "2025-07-01");
        assert_eq!(shift_month(june, -6).to_string(), "2024-12-01");
        assert_eq!(shift_month(june, 7).to_string(), "2026-01-01");
    }
}
