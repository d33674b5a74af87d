pub mod content_date;
