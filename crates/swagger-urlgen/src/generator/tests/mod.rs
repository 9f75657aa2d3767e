mod enumerator;
mod support;
