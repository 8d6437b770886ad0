//
//  jenkins-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table rendering built on `comfy-table`.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Fluent builder for list tables.
///
/// ```rust
/// use jenkins_cli::output::TableBuilder;
///
/// let table = TableBuilder::new()
///     .color(false)
///     .headers(["NAME", "STATUS"])
///     .row(["core", "SUCCESS"])
///     .build();
/// assert!(table.to_string().contains("core"));
/// ```
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(Into::into).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a build result such as `SUCCESS` or `FAILURE`.
pub fn format_result(result: &str, color: bool) -> String {
    if !color {
        return result.to_string();
    }

    match result {
        "SUCCESS" => style(result).green().to_string(),
        "UNSTABLE" => style(result).yellow().to_string(),
        "FAILURE" => style(result).red().to_string(),
        "ABORTED" | "NOT_BUILT" => style(result).dim().to_string(),
        "BUILDING" => style(result).cyan().to_string(),
        _ => result.to_string(),
    }
}

/// Translates a job's status ball color into a readable status.
///
/// Colors ending in `_anime` mean a build is in progress.
pub fn format_job_color(job_color: Option<&str>, color: bool) -> String {
    let Some(ball) = job_color else {
        return "-".to_string();
    };
    let (base, building) = match ball.strip_suffix("_anime") {
        Some(base) => (base, true),
        None => (ball, false),
    };

    let status = match base {
        "blue" => "passing",
        "yellow" => "unstable",
        "red" => "failing",
        "disabled" => "disabled",
        "aborted" => "aborted",
        "notbuilt" => "not built",
        other => other,
    };
    let text = if building {
        format!("{status} (building)")
    } else {
        status.to_string()
    };

    if !color {
        return text;
    }
    match base {
        "blue" => style(text).green().to_string(),
        "yellow" => style(text).yellow().to_string(),
        "red" => style(text).red().to_string(),
        _ => style(text).dim().to_string(),
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_job_color() {
        assert_eq!(format_job_color(Some("blue"), false), "passing");
        assert_eq!(format_job_color(Some("red_anime"), false), "failing (building)");
        assert_eq!(format_job_color(Some("notbuilt"), false), "not built");
        assert_eq!(format_job_color(None, false), "-");
    }

    #[test]
    fn test_format_result_plain() {
        assert_eq!(format_result("FAILURE", false), "FAILURE");
        assert_eq!(format_bool(true, false), "Yes");
    }

    #[test]
    fn test_table_builder() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["#", "RESULT"])
            .rows(vec![vec!["7", "SUCCESS"], vec!["8", "FAILURE"]])
            .build();
        let rendered = table.to_string();
        assert!(rendered.contains("RESULT"));
        assert!(rendered.contains("FAILURE"));
    }
}
