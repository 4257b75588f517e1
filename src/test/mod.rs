mod trace_log;
