use crate::calendar::{CalendarView, MonthGrid};
use crate::detail::{DayDetail, NO_PRODUCTS_MESSAGE};
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub fn view_href(view: CalendarView) -> String {
    format!("/?year={}&month={}", view.year, view.month)
}

pub fn day_href(view: CalendarView, key: &str) -> String {
    format!("{}&day={key}", view_href(view))
}

pub fn render_index(grid: &MonthGrid, detail: Option<&DayDetail>) -> String {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Delivery Calendar · " (grid.title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main.app {
                    header {
                        h1 { "Delivery Calendar" }
                        p.subtitle { "Scheduled restocks by supplier. Pick a highlighted day for details." }
                    }
                    (render_calendar(grid))
                    p.hint {
                        span.legend.has-delivery {} " scheduled "
                        span.legend.received {} " all received "
                        span.legend.today {} " today"
                    }
                }
                (render_detail_panel(grid.view, detail))
            }
        }
    };
    page.into_string()
}

pub fn render_calendar(grid: &MonthGrid) -> Markup {
    html! {
        section.calendar-widget #delivery-calendar {
            div.calendar-nav {
                a.nav-prev href=(view_href(grid.previous)) aria-label="Previous month" { "‹" }
                h2 { (grid.title) }
                a.nav-next href=(view_href(grid.next)) aria-label="Next month" { "›" }
            }
            div.calendar {
                @for name in grid.weekdays {
                    div.calendar-header { (name) }
                }
                @for _ in 0..grid.leading_blanks {
                    div.calendar-day.other-month {}
                }
                @for cell in &grid.days {
                    @if cell.has_delivery {
                        a.calendar-day.has-delivery.received[cell.received].today[cell.is_today]
                            href=(day_href(grid.view, &cell.key))
                            data-date=(cell.key) {
                            (cell.day)
                            span.delivery-tooltip {
                                @for (i, name) in cell.suppliers.iter().enumerate() {
                                    @if i > 0 { br; }
                                    (name)
                                }
                            }
                        }
                    } @else {
                        div.calendar-day.today[cell.is_today] data-date=(cell.key) { (cell.day) }
                    }
                }
            }
        }
    }
}

/// The detail modal. Always emitted so the page has its mount point; it only
/// carries the `open` class and content when a day was picked.
pub fn render_detail_panel(view: CalendarView, detail: Option<&DayDetail>) -> Markup {
    let close_href = view_href(view);
    html! {
        div.modal.open[detail.is_some()] #delivery-modal aria-hidden=(if detail.is_some() { "false" } else { "true" }) {
            a.modal-backdrop href=(close_href) aria-label="Close details" {}
            div.modal-content role="dialog" aria-labelledby="delivery-details-title" {
                a.modal-close href=(close_href) aria-label="Close" { "×" }
                h3 #delivery-details-title {
                    @if let Some(detail) = detail { "Deliveries for " (detail.title) }
                }
                div #delivery-details-body {
                    @if let Some(detail) = detail {
                        @if let Some(message) = detail.message {
                            p.empty-state { (message) }
                        }
                        @for section in &detail.suppliers {
                            div.supplier {
                                h4 { (section.company_name) }
                                p { strong { "Contact: " } (section.contact_person) }
                                p { strong { "Phone: " } (section.phone) }
                                p {
                                    strong { "Status: " }
                                    span class=(section.status.css_class()) { (section.status.label()) }
                                }
                                @if section.products.is_empty() {
                                    p.empty-state { (NO_PRODUCTS_MESSAGE) }
                                } @else {
                                    ul.products {
                                        @for product in &section.products {
                                            li { (product.label()) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

const STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f1f4f8;
      --bg-2: #c9d8ea;
      --ink: #23272f;
      --accent: #2f6fb0;
      --ok: #2d7a4b;
      --pending: #c47a1b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(35, 39, 47, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3ebf5 60%, #f6f8fb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle,
    .hint {
      margin: 0;
      color: #5f6570;
    }

    .calendar-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 16px;
    }

    .calendar-nav h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .calendar-nav a {
      text-decoration: none;
      font-size: 1.6rem;
      color: var(--accent);
      padding: 4px 14px;
      border-radius: 999px;
      background: rgba(47, 111, 176, 0.08);
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .calendar-header {
      text-align: center;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8a8f98;
    }

    .calendar-day {
      position: relative;
      min-height: 56px;
      padding: 8px;
      border-radius: 12px;
      background: white;
      border: 1px solid rgba(35, 39, 47, 0.08);
      color: inherit;
      text-decoration: none;
    }

    .calendar-day.other-month {
      background: transparent;
      border: none;
    }

    .calendar-day.today {
      border: 2px solid var(--accent);
    }

    .calendar-day.has-delivery {
      background: rgba(196, 122, 27, 0.16);
      cursor: pointer;
    }

    .calendar-day.has-delivery.received {
      background: rgba(45, 122, 75, 0.18);
    }

    .delivery-tooltip {
      display: none;
      position: absolute;
      left: 50%;
      bottom: calc(100% + 6px);
      transform: translateX(-50%);
      white-space: nowrap;
      background: var(--ink);
      color: white;
      font-size: 0.8rem;
      padding: 6px 10px;
      border-radius: 8px;
      z-index: 2;
    }

    .calendar-day.has-delivery:hover .delivery-tooltip {
      display: block;
    }

    .legend {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 4px;
      margin-left: 12px;
    }

    .legend.has-delivery { background: rgba(196, 122, 27, 0.4); }
    .legend.received { background: rgba(45, 122, 75, 0.4); }
    .legend.today { border: 2px solid var(--accent); }

    .modal {
      display: none;
      position: fixed;
      inset: 0;
      place-items: center;
      padding: 18px;
    }

    .modal.open {
      display: grid;
    }

    .modal-backdrop {
      position: absolute;
      inset: 0;
      background: rgba(20, 24, 31, 0.45);
    }

    .modal-content {
      position: relative;
      width: min(520px, 100%);
      max-height: 80vh;
      overflow-y: auto;
      background: white;
      border-radius: 20px;
      padding: 28px;
      box-shadow: var(--shadow);
    }

    .modal-close {
      position: absolute;
      top: 14px;
      right: 18px;
      font-size: 1.5rem;
      text-decoration: none;
      color: #6b707a;
    }

    .supplier {
      border-top: 1px solid rgba(35, 39, 47, 0.08);
      padding-top: 12px;
      margin-top: 12px;
    }

    .supplier h4,
    .supplier p {
      margin: 4px 0;
    }

    .status-received { color: var(--ok); font-weight: 600; }
    .status-pending { color: var(--pending); font-weight: 600; }

    .empty-state {
      color: #6f747d;
      font-style: italic;
    }

    @media (max-width: 600px) {
      .app {
        padding: 24px 16px;
      }
      .calendar-day {
        min-height: 44px;
        padding: 6px;
      }
    }
"#;
