pub mod run;
pub mod send;
pub mod theme;
