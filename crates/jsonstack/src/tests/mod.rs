mod property_roundtrip;
mod snapshot_events;
