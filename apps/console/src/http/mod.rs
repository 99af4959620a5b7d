pub mod cookies;
