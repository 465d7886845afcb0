mod split;
mod time;
