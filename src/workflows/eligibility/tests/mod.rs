mod common;

mod decision;
mod documents;
