mod timeout_from_json_config;
mod track_timed_call;
