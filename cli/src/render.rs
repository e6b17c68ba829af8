//! Table rendering of API responses

use comfy_table::{ContentArrangement, Table};
use serde_json::Value;

/// One titled table
pub struct Section {
    pub title: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Section {
    fn new(title: Option<String>, columns: &[&str]) -> Self {
        Self {
            title,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn print(&self) {
        if let Some(title) = &self.title {
            println!("{}", title);
        }
        if self.rows.is_empty() {
            println!("(no results)\n");
            return;
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(&self.columns);
        for row in &self.rows {
            table.add_row(row);
        }
        println!("{}", table);
        println!("{} row(s)\n", self.rows.len());
    }
}

fn cell(v: &Value) -> String {
    match v {
        Value::Null => "".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

fn items<'a>(v: &'a Value, key: &str) -> &'a [Value] {
    v.get(key).and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

/// Comma-separated `key` field of each element of `v[list]`
fn joined(v: &Value, list: &str, key: &str) -> String {
    items(v, list)
        .iter()
        .map(|item| cell(&item[key]))
        .collect::<Vec<_>>()
        .join(", ")
}

fn work_row(work: &Value) -> Vec<String> {
    vec![cell(&work["id"]), cell(&work["title"]), cell(&work["year"])]
}

pub fn health(v: &Value) -> Vec<Section> {
    let mut s = Section::new(None, &["status", "graph"]);
    s.rows.push(vec![cell(&v["status"]), cell(&v["graph"])]);
    vec![s]
}

pub fn search(v: &Value) -> Vec<Section> {
    let mut s = Section::new(
        Some(format!("Results for \"{}\"", cell(&v["query"]))),
        &["id", "title", "year", "directors", "genres"],
    );
    for work in items(v, "results") {
        let mut row = work_row(work);
        row.push(joined(work, "creators", "name"));
        row.push(joined(work, "topics", "name"));
        s.rows.push(row);
    }
    vec![s]
}

pub fn related(v: &Value) -> Vec<Section> {
    let mut s = Section::new(
        Some(format!("Related to {}", cell(&v["work_id"]))),
        &["id", "title", "year", "score"],
    );
    for entry in items(v, "related") {
        let mut row = work_row(&entry["work"]);
        row.push(cell(&entry["score"]));
        s.rows.push(row);
    }
    vec![s]
}

pub fn contributions(v: &Value) -> Vec<Section> {
    let creator = &v["creator"];
    let mut works = Section::new(
        Some(format!("{} ({})", cell(&creator["name"]), cell(&creator["id"]))),
        &["id", "title", "year"],
    );
    works.rows = items(v, "works").iter().map(work_row).collect();

    let mut topics = Section::new(Some("Genres".into()), &["name"]);
    topics.rows = items(v, "topics").iter().map(|t| vec![cell(&t["name"])]).collect();
    vec![works, topics]
}

pub fn topic(v: &Value) -> Vec<Section> {
    let name = cell(&v["topic"]["name"]);
    let mut related = Section::new(Some(format!("Related to {}", name)), &["genre", "score"]);
    related.rows = items(v, "related_topics")
        .iter()
        .map(|r| vec![cell(&r["topic"]["name"]), cell(&r["score"])])
        .collect();

    let mut works = Section::new(Some("Films".into()), &["id", "title", "year"]);
    works.rows = items(v, "works").iter().map(work_row).collect();

    let mut creators = Section::new(Some("Directors".into()), &["id", "name"]);
    creators.rows = items(v, "creators")
        .iter()
        .map(|c| vec![cell(&c["id"]), cell(&c["name"])])
        .collect();
    vec![related, works, creators]
}

pub fn ask(v: &Value) -> Vec<Section> {
    let rows = items(v, "rows");
    let columns: Vec<String> = rows
        .first()
        .and_then(Value::as_object)
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();

    let mut s = Section {
        title: Some(cell(&v["generated_query"])),
        columns: columns.clone(),
        rows: Vec::new(),
    };
    s.rows = rows
        .iter()
        .map(|row| columns.iter().map(|c| cell(&row[c.as_str()])).collect())
        .collect();
    vec![s]
}
