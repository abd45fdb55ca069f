mod headless;
