mod test_merge;
