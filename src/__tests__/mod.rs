mod concurrent_timeouts;
mod nested_timeouts;
mod stale_countdown;
