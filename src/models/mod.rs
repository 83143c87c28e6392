// src/models/mod.rs

pub mod category;
pub mod numeric;
pub mod question;
pub mod quiz;
