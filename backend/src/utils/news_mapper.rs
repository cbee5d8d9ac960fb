use crate::models::news::{NewsRecord, NewsView};

pub fn to_record(view: NewsView) -> NewsRecord {
    NewsRecord {
        number: view.number,
        title: view.title,
        author: view.author,
        text: view.text,
    }
}

pub fn to_view(record: NewsRecord) -> NewsView {
    NewsView {
        number: record.number,
        title: record.title,
        author: record.author,
        text: record.text,
    }
}

pub fn to_views(records: Vec<NewsRecord>) -> Vec<NewsView> {
    records.into_iter().map(to_view).collect()
}
