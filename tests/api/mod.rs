mod blogs;
mod persistence;
