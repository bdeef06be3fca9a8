use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{
    AppConfig, Category, Contact, Day, Essential, Flight, Hotel, Item, Link, Trip, TripInfo,
    Weather, WeatherIcon,
};
use crate::tui::app::App;
use crate::tui::input;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Two days, three items on the first and one on the second, plus one of
/// each reference entry.
pub fn sample_trip() -> Trip {
    let mut meet = Item::new("t-1", "09:00", "Meet at the airport", Category::Other);
    meet.note = Some("Gate B\nBring passports\nThird line".into());

    let mut ski = Item::new("t-2", "10:30", "Ski lesson", Category::Activity);
    ski.location = Some("Hakkoda".into());
    ski.map_link = Some("https://maps.example/ski".into());
    ski.primary_link = Some("https://ski.example".into());
    ski.primary_link_label = Some("Ski school".into());
    ski.additional_links = vec![Link {
        label: "Rental".into(),
        url: "https://ski.example/rental".into(),
    }];
    ski.guide_highlight = Some("Best powder of the trip".into());

    let mut dinner = Item::new("t-3", "18:30", "Crab dinner", Category::Food);
    dinner.tags = vec!["must-eat".into()];
    dinner.staff_instructions = Some("RESERVATION FORM\n  Seats: 2 adults\n  Time: 18:30".into());
    dinner.note = Some("Order the king crab".into());

    let onsen = Item::new("t-4", "15:00", "Onsen", Category::Activity);

    Trip {
        info: TripInfo {
            name: "Test Trip".into(),
            tagline: String::new(),
            year: "2025".into(),
        },
        days: vec![
            Day {
                date: "1/24".into(),
                day_label: "D1".into(),
                weekday: "SAT".into(),
                weather: Weather {
                    temp: "6C".into(),
                    condition: "Cloudy".into(),
                    icon: WeatherIcon::Cloud,
                },
                items: vec![meet, ski, dinner],
            },
            Day {
                date: "1/25".into(),
                day_label: "D2".into(),
                weekday: "SUN".into(),
                weather: Weather {
                    temp: "-2C".into(),
                    condition: "Snowy".into(),
                    icon: WeatherIcon::Snow,
                },
                items: vec![onsen],
            },
        ],
        essentials: vec![Essential {
            badge: "Must".into(),
            title: "Visa Portal".into(),
            subtitle: "Entry registration".into(),
            url: "https://visa.example".into(),
        }],
        flights: vec![Flight {
            code: "XX 101".into(),
            route: "TPE - AOJ".into(),
            time: "08:00".into(),
            date: "1/24".into(),
            detail: "Terminal 1".into(),
        }],
        hotels: vec![Hotel {
            name: "Hotel Aurora".into(),
            dates: "1/24 - 1/25".into(),
            address: "1 Snow road, Aomori".into(),
            note: String::new(),
        }],
        contacts: vec![Contact {
            name: "Police".into(),
            phone: "110".into(),
        }],
    }
}

fn sample_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.ledger.default_payer = "Amy".into();
    config
}

/// App over the sample trip. Links are swallowed, never opened.
pub fn sample_app() -> App {
    App::new(sample_trip(), sample_config()).with_opener(Box::new(|_| Ok(())))
}

/// App whose opened URLs are recorded in order
pub fn app_with_recorder() -> (App, Rc<RefCell<Vec<String>>>) {
    let opened = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&opened);
    let app = App::new(sample_trip(), sample_config()).with_opener(Box::new(move |url| {
        sink.borrow_mut().push(url.to_string());
        Ok(())
    }));
    (app, opened)
}

pub fn press(app: &mut App, code: KeyCode) {
    input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
