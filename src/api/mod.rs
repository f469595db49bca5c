pub mod health;
pub mod kpis;
pub mod municipalities;
pub mod swagger;
