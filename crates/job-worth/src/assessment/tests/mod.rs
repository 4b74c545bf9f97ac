mod classification;
mod common;
mod report;
