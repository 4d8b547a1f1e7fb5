#[cfg(test)]
mod probe;
#[cfg(test)]
mod settings;
#[cfg(test)]
mod utils;
