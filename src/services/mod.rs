// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod shelter_service;


pub use shelter_service::ShelterService;
