pub mod trace_response_body;
