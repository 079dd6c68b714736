pub mod ndjson_output_adapter;
