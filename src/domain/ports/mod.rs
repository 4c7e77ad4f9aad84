mod icon_catalog_port;

pub use icon_catalog_port::IconCatalog;

#[cfg(test)]
pub use icon_catalog_port::MockIconCatalog;
