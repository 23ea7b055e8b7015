fn main() {
    cannon_range::game::run();
}
