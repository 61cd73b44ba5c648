// Integration tests for shorty-check: full runs against a mocked service.

mod run;
