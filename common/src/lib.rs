#![no_std]

pub mod escrow;
