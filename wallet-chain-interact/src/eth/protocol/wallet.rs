use alloy::sol;

// PapyrusWallet entry points used by the interactor.
sol!(
    function submitTransaction(address destination, uint256 value, bytes data) public returns (uint256 transactionId);

    function submitTransactions(
        address[] destinations,
        uint256[] values,
        uint256[] dataOffsets,
        uint256[] dataLengths,
        bytes data
    ) public;

    function confirmTransaction(uint256 transactionId) public;

    function confirmTransactions(uint256[] transactionIds) public;

    function transactionCount() public view returns (uint256);
);
