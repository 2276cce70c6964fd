//! # Localized Date/Time Helper
//!
//! Produces the bundle of formatted "now" strings the widgets display and
//! store. Everything is rendered for São Paulo local time. Brazil has not
//! observed daylight saving since 2019, so the offset is a fixed UTC-3,
//! pinned the same way the storage layer pins its timestamps.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};

/// São Paulo local time offset from UTC, in seconds.
const SAO_PAULO_OFFSET_SECS: i32 = 3 * 3600;

fn sao_paulo_offset() -> FixedOffset {
    FixedOffset::west_opt(SAO_PAULO_OFFSET_SECS).unwrap()
}

/// Formatted strings for a single instant in São Paulo local time.
///
/// Field names follow the app's display vocabulary: `banco` is the
/// storage-facing timestamp format progress rows are written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedNow {
    /// `"HH:MM:SS"`
    pub hora: String,
    /// `"DD/MM/YYYY"`
    pub data: String,
    /// `"HH:MM:SS -03 DD/MM/YYYY"`
    pub data_hora: String,
    /// English weekday name, e.g. `"Monday"`
    pub dia_semana_en: String,
    /// Portuguese weekday name, e.g. `"Segunda-feira"`
    pub dia_semana_pt: String,
    /// `"<Weekday-pt>, DD/MM/YYYY HH:MM"`
    pub data_extenso: String,
    /// `"YYYY-MM-DD HH:MM:SS"`, the progress-table timestamp format
    pub banco: String,
}

/// Format the current instant for São Paulo local time.
pub fn now_sao_paulo() -> LocalizedNow {
    localize(Utc::now().with_timezone(&sao_paulo_offset()))
}

/// Format an arbitrary instant. Pure; `now_sao_paulo` is a thin clock shim
/// over this.
pub fn localize(dt: DateTime<FixedOffset>) -> LocalizedNow {
    let hora = format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second());
    let data = format!("{:02}/{:02}/{:04}", dt.day(), dt.month(), dt.year());
    let dia_semana_pt = weekday_pt(dt.weekday());

    LocalizedNow {
        data_hora: format!("{} {} {}", hora, offset_hours_label(dt.offset()), data),
        dia_semana_en: dt.format("%A").to_string(),
        data_extenso: format!(
            "{}, {} {:02}:{:02}",
            dia_semana_pt,
            data,
            dt.hour(),
            dt.minute()
        ),
        banco: dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        dia_semana_pt: dia_semana_pt.to_string(),
        hora,
        data,
    }
}

/// Signed two-digit hour component of a UTC offset, e.g. `"-03"`.
fn offset_hours_label(offset: &FixedOffset) -> String {
    format!("{:+03}", offset.local_minus_utc() / 3600)
}

fn weekday_pt(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}
