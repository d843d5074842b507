mod extraction;
mod navigation;
