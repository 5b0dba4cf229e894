use crate::calendar::{build_month_grid_at, parse_date_key, CalendarView, MonthGrid};
use crate::detail::DayDetail;
use crate::errors::AppError;
use crate::index::DeliveryIndex;
use crate::models::CalendarQuery;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Html<String>, AppError> {
    Ok(Html(render_page(&state.index, &query, today())?))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<MonthGrid>, AppError> {
    let today = today();
    let (view, _) = resolve_query(&query, today)?;
    Ok(Json(build_month_grid_at(view, &state.index, today)))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<DayDetail>, AppError> {
    let date = parse_date_key(&raw).ok_or_else(|| AppError::invalid_day(&raw))?;
    Ok(Json(DayDetail::resolve(&state.index, date)))
}

pub async fn health() -> &'static str {
    "OK"
}

/// Renders the whole page against one reading of the clock, so the default
/// month and the highlighted day always agree.
pub fn render_page(
    index: &DeliveryIndex,
    query: &CalendarQuery,
    today: NaiveDate,
) -> Result<String, AppError> {
    let (view, day) = resolve_query(query, today)?;
    let grid = build_month_grid_at(view, index, today);
    let detail = day.map(|date| DayDetail::resolve(index, date));
    Ok(render_index(&grid, detail.as_ref()))
}

/// Works out which month to show and which day, if any, has its detail panel
/// open. Without `year`/`month` the view follows `day`, then `today`.
pub fn resolve_query(
    query: &CalendarQuery,
    today: NaiveDate,
) -> Result<(CalendarView, Option<NaiveDate>), AppError> {
    let day = match query.day.as_deref().filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => Some(parse_date_key(raw).ok_or_else(|| AppError::invalid_day(raw))?),
        None => None,
    };

    let fallback = CalendarView::at(day.unwrap_or(today));
    let view = match (query.year, query.month) {
        (None, None) => fallback,
        (year, month) => {
            let year = year.unwrap_or(fallback.year);
            let month = month.unwrap_or(fallback.month);
            CalendarView::new(year, month).ok_or_else(|| AppError::invalid_month(year, month))?
        }
    };

    Ok((view, day))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn query(year: Option<i32>, month: Option<u32>, day: Option<&str>) -> CalendarQuery {
        CalendarQuery {
            year,
            month,
            day: day.map(str::to_string),
        }
    }

    #[test]
    fn empty_query_shows_current_month_closed() {
        let (view, day) = resolve_query(&CalendarQuery::default(), date(2026, 1, 5)).unwrap();
        assert_eq!(view, CalendarView::new(2026, 1).unwrap());
        assert_eq!(day, None);
    }

    #[test]
    fn day_alone_selects_its_month() {
        let (view, day) =
            resolve_query(&query(None, None, Some("2024-03-15")), date(2026, 1, 5)).unwrap();
        assert_eq!(view, CalendarView::new(2024, 3).unwrap());
        assert_eq!(day, Some(date(2024, 3, 15)));
    }

    #[test]
    fn explicit_month_wins_over_day() {
        let (view, day) =
            resolve_query(&query(Some(2024), Some(4), Some("2024-03-15")), date(2026, 1, 5))
                .unwrap();
        assert_eq!(view, CalendarView::new(2024, 4).unwrap());
        assert_eq!(day, Some(date(2024, 3, 15)));
    }

    #[test]
    fn partial_query_fills_from_today() {
        let (view, _) = resolve_query(&query(None, Some(7), None), date(2026, 1, 5)).unwrap();
        assert_eq!(view, CalendarView::new(2026, 7).unwrap());
    }

    #[test]
    fn blank_day_means_closed_panel() {
        let (_, day) = resolve_query(&query(None, None, Some("")), date(2026, 1, 5)).unwrap();
        assert_eq!(day, None);
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = resolve_query(&query(Some(2024), Some(13), None), date(2026, 1, 5)).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = resolve_query(&query(None, None, Some("15/03/2024")), date(2026, 1, 5)).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("15/03/2024"));
    }

    #[test]
    fn page_highlights_the_same_today_it_defaults_to() {
        let index = DeliveryIndex::default();
        let page = render_page(&index, &CalendarQuery::default(), date(2026, 1, 31)).unwrap();
        assert!(page.contains("January 2026"));
        assert!(page.contains("class=\"calendar-day today\" data-date=\"2026-01-31\""));
    }

    #[test]
    fn page_with_day_opens_panel() {
        let index = DeliveryIndex::default();
        let page = render_page(&index, &query(None, None, Some("2024-03-15")), date(2026, 1, 5))
            .unwrap();
        assert!(page.contains("March 2024"));
        assert!(page.contains("class=\"modal open\""));
        assert!(!page.contains("calendar-day today"));
    }
}
