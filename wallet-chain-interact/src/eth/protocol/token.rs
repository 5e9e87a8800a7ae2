use alloy::sol;

// PrePapyrusToken entry points used by the interactor.
sol!(
    function setTransferable(bool value) public;
    function transferable() public view returns (bool);
    function transfer(address to, uint256 value) public returns (bool success);
    function balanceOf(address owner) public view returns (uint256 balance);
);
