#![no_main]

use libfuzzer_sys::fuzz_target;

use augur::engine::{merge_forensic, HeuristicReport};
use augur::gateway::parse_reply;

fuzz_target!(|data: &[u8]| {
    // The reply parser must be total: any text the remote model emits
    // normalizes to a reply, and merging it stays within the contract.
    if let Ok(text) = std::str::from_utf8(data) {
        let reply = parse_reply(text);
        let result = merge_forensic(HeuristicReport::default(), Some(reply));
        assert!(result.score <= 100);
    }
});
