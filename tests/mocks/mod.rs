pub mod browser_mock;
