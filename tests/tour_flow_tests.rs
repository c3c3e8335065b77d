//! Integrationstests: Host-Intents → Controller → Events, mit virtueller Uhr.

mod tour_flow;
