mod common;
mod domain;
mod form;
