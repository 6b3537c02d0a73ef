mod export;
mod files;
mod properties;
