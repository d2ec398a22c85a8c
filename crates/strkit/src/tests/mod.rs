mod roundtrip;
mod splitter;
