mod accessors;
mod parser;
