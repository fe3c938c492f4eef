#[cfg(test)]
mod common;

#[cfg(test)]
mod resolver_scenario_tests;

#[cfg(test)]
mod access_gate_tests;

#[cfg(test)]
mod admin_flow_tests;
