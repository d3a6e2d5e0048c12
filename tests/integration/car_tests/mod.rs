mod navigation;
mod scenario;
mod ui;
