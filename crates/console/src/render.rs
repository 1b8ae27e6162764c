//! Plain-text rendering of tables and countdown banners for the terminal.

use uavfleet_core::countdown::{
    Band, EngineCountdown, InspectionCountdown, InsuranceCountdown, ENGINE_TO_HINT,
};
use uavfleet_core::duration::format_duration;
use uavfleet_core::models::{
    Activity, UavEngine, UavFailure, UavFailureStep, UavMaintenance, User, Vehicle,
};
use uavfleet_core::statuses::Tag;

const PROGRESS_WIDTH: usize = 20;

/// Left-aligned columns sized to the widest cell, measured in chars.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(col) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = vec![pad_line(headers, &widths)];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.extend(rows.iter().map(|row| {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        pad_line(&cells, &widths)
    }));
    out.join("\n")
}

fn pad_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn tagged(label: &str, tag: Tag) -> String {
    format!("{label} ({})", tag.as_str())
}

fn banner(band: Band, text: &str) -> String {
    format!("[{}] {text}", band.as_str())
}

fn progress(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * PROGRESS_WIDTH / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_WIDTH - filled)
    )
}

// ---------------------------------------------------------------------------
// Countdown banners
// ---------------------------------------------------------------------------

pub fn engine_banner(countdown: &EngineCountdown) -> String {
    format!(
        "{}\nНаработка: {}, порог ТО: {} ч\n{ENGINE_TO_HINT}",
        banner(
            countdown.band(),
            &format!("{} до ТО двигателя", countdown.formatted)
        ),
        format_duration(countdown.operated),
        countdown.threshold / 60
    )
}

pub fn insurance_banner(countdown: Option<&InsuranceCountdown>) -> String {
    match countdown {
        Some(countdown) => banner(countdown.band(), &countdown.text()),
        None => "Дата окончания страховки не задана".to_string(),
    }
}

pub fn inspection_banner(countdown: &InspectionCountdown) -> String {
    format!(
        "{}\n{}",
        banner(countdown.band(), &countdown.text()),
        progress(countdown.progress_percent())
    )
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

pub fn vehicles(rows: &[Vehicle]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|v| {
            vec![
                v.id.to_string(),
                v.vehicle_type.clone(),
                v.vehicle_id.clone(),
                v.description.clone(),
            ]
        })
        .collect();
    table(&["№", "Тип", "Номер", "Описание"], &rows)
}

pub fn users(rows: &[User]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.login.clone(),
                u.surname.clone(),
                u.lastname.clone(),
                u.role.clone(),
                if u.enabled { "да" } else { "нет" }.to_string(),
            ]
        })
        .collect();
    table(
        &["№", "Логин", "Имя", "Фамилия", "Роль", "Активен"],
        &rows,
    )
}

pub fn activities(rows: &[Activity]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.date.clone(),
                a.username.clone(),
                a.ip_address.clone(),
                a.content.clone(),
            ]
        })
        .collect();
    table(&["№", "Дата", "Пользователь", "IP", "Действие"], &rows)
}

pub fn maintenance(rows: &[UavMaintenance]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.inspection_date.clone(),
                tagged(m.status.label(), m.status.tag()),
                m.note.clone(),
            ]
        })
        .collect();
    table(&["№", "Дата ТО", "Статус", "Примечание"], &rows)
}

pub fn engine_log(rows: &[UavEngine]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.engine_active_from.clone(),
                e.engine_active_till.clone(),
                e.engine_operate_duration.clone(),
                e.reporter.clone(),
                e.reported_timestamp.clone(),
                e.note.clone(),
            ]
        })
        .collect();
    table(
        &["№", "Начало", "Окончание", "Наработка", "Внёс", "Когда", "Примечание"],
        &rows,
    )
}

pub fn failures(rows: &[UavFailure]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|f| {
            vec![
                f.id.to_string(),
                f.date.clone(),
                tagged(f.severity.label(), f.severity.tag()),
                f.description.clone(),
            ]
        })
        .collect();
    table(&["№", "Дата", "Важность", "Описание"], &rows)
}

pub fn failure_steps(rows: &[UavFailureStep]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.date.clone(),
                s.contact_person.clone(),
                tagged(s.importance.label(), s.importance.tag()),
                s.description.clone(),
            ]
        })
        .collect();
    table(
        &["№", "Дата", "Контакт", "Важность", "Описание"],
        &rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_padded_to_the_widest_cell() {
        let out = table(
            &["№", "Номер"],
            &[vec!["1".into(), "A-1".into()], vec!["10".into(), "Б-22222".into()]],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "№  | Номер");
        assert_eq!(lines[1], "---+--------");
        assert_eq!(lines[2], "1  | A-1");
        assert_eq!(lines[3], "10 | Б-22222");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress(0), format!("[{}] 0%", ".".repeat(20)));
        assert_eq!(progress(50), format!("[{}{}] 50%", "#".repeat(10), ".".repeat(10)));
        assert_eq!(progress(100), format!("[{}] 100%", "#".repeat(20)));
    }

    #[test]
    fn missing_insurance_date_has_its_own_banner() {
        assert_eq!(insurance_banner(None), "Дата окончания страховки не задана");
    }
}
