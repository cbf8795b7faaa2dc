mod common;

mod gpai;
mod high_risk;
mod routing;
