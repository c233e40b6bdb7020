mod embed;
mod mint;
