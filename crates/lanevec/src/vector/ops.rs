use lanevec_macros::lane_operator;

lane_operator!(Add, add, AddAssign, add_assign => lanes lane_add);
lane_operator!(Sub, sub, SubAssign, sub_assign => lanes lane_sub);
lane_operator!(Mul, mul, MulAssign, mul_assign => lanes lane_mul);

lane_operator!(BitAnd, bitand, BitAndAssign, bitand_assign => register);
lane_operator!(BitOr, bitor, BitOrAssign, bitor_assign => register);
lane_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign => register);
lane_operator!(Not, not => register);
